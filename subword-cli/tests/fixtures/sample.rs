parseHTTPResponse
my_value
foo bar
