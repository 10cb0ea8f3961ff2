getValue
