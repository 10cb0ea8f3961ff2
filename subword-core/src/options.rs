//! Boundary options
//!
//! A [`BoundaryOptions`] value is an immutable snapshot of every rule the
//! table builder understands. Changing any field means building a new table.
//! Options round-trip through TOML with `snake_case` keys and values.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Defines a `snake_case` option enum with matching `FromStr`/`Display`
macro_rules! attachment_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every accepted value, in declaration order
            pub const VARIANTS: &'static [$name] = &[$($name::$variant),+];

            /// Name used in option files and on the command line
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $text, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s {
                    $( $text => Ok($name::$variant), )+
                    _ => Err(format!("unknown {} value: {s}", stringify!($name))),
                }
            }
        }
    };
}

attachment_enum! {
    /// Where runs of whitespace attach
    SkipConnectedWhitespace {
        /// Whitespace forms its own stop
        Never => "never",
        /// Whitespace glues to whatever follows it
        BeforeAnything => "before_anything",
        /// Whitespace glues to whatever precedes it
        #[default]
        AfterAnything => "after_anything",
    }
}

attachment_enum! {
    /// Where underscores attach relative to letter runs
    SkipConnectedUnderscores {
        /// Underscores form their own stop
        Never => "never",
        /// Underscores glue to the following fragment
        BeforeSubwords => "before_subwords",
        /// Underscores glue to the preceding fragment
        #[default]
        AfterSubwords => "after_subwords",
    }
}

attachment_enum! {
    /// Where operators attach relative to words
    SkipConnectedOperators {
        /// Operators form their own stop
        #[default]
        Never => "never",
        /// Operators glue to the following word
        BeforeWords => "before_words",
        /// Operators glue to the preceding word
        AfterWords => "after_words",
    }
}

attachment_enum! {
    /// Where brackets attach relative to words
    SkipConnectedBrackets {
        /// Brackets form their own stop
        #[default]
        Never => "never",
        /// Brackets glue to the following word
        BeforeWords => "before_words",
        /// Brackets glue to the preceding word
        AfterWords => "after_words",
    }
}

/// Rules controlling where sub-word boundaries fall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoundaryOptions {
    /// Treat an uppercase letter followed by lowercase as one word
    pub recognize_pascal: bool,
    /// Stop between an all-caps run and a following capitalized word
    pub stop_between_upper_and_pascal: bool,
    /// Stop between every pair of adjacent operators
    pub stop_between_operators: bool,
    /// Stop between every pair of adjacent brackets
    pub stop_between_brackets: bool,
    /// Stop between an operator and an adjacent bracket
    pub stop_between_operators_and_brackets: bool,
    /// Whitespace attachment policy
    pub skip_connected_whitespace: SkipConnectedWhitespace,
    /// Underscore attachment policy
    pub skip_connected_underscores: SkipConnectedUnderscores,
    /// Operator attachment policy
    pub skip_connected_operators: SkipConnectedOperators,
    /// Bracket attachment policy
    pub skip_connected_brackets: SkipConnectedBrackets,
}

impl Default for BoundaryOptions {
    fn default() -> Self {
        Self {
            recognize_pascal: true,
            stop_between_upper_and_pascal: true,
            stop_between_operators: false,
            stop_between_brackets: true,
            stop_between_operators_and_brackets: true,
            skip_connected_whitespace: SkipConnectedWhitespace::AfterAnything,
            skip_connected_underscores: SkipConnectedUnderscores::AfterSubwords,
            skip_connected_operators: SkipConnectedOperators::Never,
            skip_connected_brackets: SkipConnectedBrackets::Never,
        }
    }
}

impl BoundaryOptions {
    /// Names of every option, in declaration order
    pub const NAMES: [&'static str; 9] = [
        "recognize_pascal",
        "stop_between_upper_and_pascal",
        "stop_between_operators",
        "stop_between_brackets",
        "stop_between_operators_and_brackets",
        "skip_connected_whitespace",
        "skip_connected_underscores",
        "skip_connected_operators",
        "skip_connected_brackets",
    ];

    /// Create an options builder starting from the defaults
    pub fn builder() -> BoundaryOptionsBuilder {
        BoundaryOptionsBuilder::default()
    }

    /// Parse options from a TOML document
    ///
    /// Missing keys keep their default value.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Load options from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Render the options as a TOML document
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Override a single option from its textual form
    ///
    /// Booleans accept `true`/`false`, enums accept the same names used in
    /// option files.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key.trim() {
            "recognize_pascal" => self.recognize_pascal = parse_value(key, value)?,
            "stop_between_upper_and_pascal" => {
                self.stop_between_upper_and_pascal = parse_value(key, value)?
            }
            "stop_between_operators" => self.stop_between_operators = parse_value(key, value)?,
            "stop_between_brackets" => self.stop_between_brackets = parse_value(key, value)?,
            "stop_between_operators_and_brackets" => {
                self.stop_between_operators_and_brackets = parse_value(key, value)?
            }
            "skip_connected_whitespace" => {
                self.skip_connected_whitespace = parse_value(key, value)?
            }
            "skip_connected_underscores" => {
                self.skip_connected_underscores = parse_value(key, value)?
            }
            "skip_connected_operators" => self.skip_connected_operators = parse_value(key, value)?,
            "skip_connected_brackets" => self.skip_connected_brackets = parse_value(key, value)?,
            other => return Err(ConfigError::UnknownOption(other.to_string())),
        }
        Ok(())
    }

    /// Apply a `key=value` override
    pub fn apply_override(&mut self, assignment: &str) -> Result<()> {
        let (key, value) =
            assignment
                .split_once('=')
                .ok_or_else(|| ConfigError::InvalidValue {
                    option: assignment.trim().to_string(),
                    value: String::new(),
                })?;
        self.set(key, value)
    }

    /// Current value of an option in its textual form
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "recognize_pascal" => self.recognize_pascal.to_string(),
            "stop_between_upper_and_pascal" => self.stop_between_upper_and_pascal.to_string(),
            "stop_between_operators" => self.stop_between_operators.to_string(),
            "stop_between_brackets" => self.stop_between_brackets.to_string(),
            "stop_between_operators_and_brackets" => {
                self.stop_between_operators_and_brackets.to_string()
            }
            "skip_connected_whitespace" => self.skip_connected_whitespace.to_string(),
            "skip_connected_underscores" => self.skip_connected_underscores.to_string(),
            "skip_connected_operators" => self.skip_connected_operators.to_string(),
            "skip_connected_brackets" => self.skip_connected_brackets.to_string(),
            _ => return None,
        };
        Some(value)
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        option: key.trim().to_string(),
        value: value.to_string(),
    })
}

/// Fluent builder for [`BoundaryOptions`]
#[derive(Debug, Default)]
pub struct BoundaryOptionsBuilder {
    options: BoundaryOptions,
}

impl BoundaryOptionsBuilder {
    /// Create a builder starting from the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether PascalCase words stay together
    pub fn recognize_pascal(mut self, on: bool) -> Self {
        self.options.recognize_pascal = on;
        self
    }

    /// Set whether to stop between an all-caps run and a capitalized word
    pub fn stop_between_upper_and_pascal(mut self, on: bool) -> Self {
        self.options.stop_between_upper_and_pascal = on;
        self
    }

    /// Set whether adjacent operators are separate stops
    pub fn stop_between_operators(mut self, on: bool) -> Self {
        self.options.stop_between_operators = on;
        self
    }

    /// Set whether adjacent brackets are separate stops
    pub fn stop_between_brackets(mut self, on: bool) -> Self {
        self.options.stop_between_brackets = on;
        self
    }

    /// Set whether an operator next to a bracket is a stop
    pub fn stop_between_operators_and_brackets(mut self, on: bool) -> Self {
        self.options.stop_between_operators_and_brackets = on;
        self
    }

    /// Set the whitespace attachment policy
    pub fn skip_connected_whitespace(mut self, policy: SkipConnectedWhitespace) -> Self {
        self.options.skip_connected_whitespace = policy;
        self
    }

    /// Set the underscore attachment policy
    pub fn skip_connected_underscores(mut self, policy: SkipConnectedUnderscores) -> Self {
        self.options.skip_connected_underscores = policy;
        self
    }

    /// Set the operator attachment policy
    pub fn skip_connected_operators(mut self, policy: SkipConnectedOperators) -> Self {
        self.options.skip_connected_operators = policy;
        self
    }

    /// Set the bracket attachment policy
    pub fn skip_connected_brackets(mut self, policy: SkipConnectedBrackets) -> Self {
        self.options.skip_connected_brackets = policy;
        self
    }

    /// Finish building
    pub fn build(self) -> BoundaryOptions {
        self.options
    }
}
