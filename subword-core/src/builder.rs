//! Table construction from boundary options
//!
//! Rules are overlaid in a fixed order and later rules overwrite earlier ones
//! where their ranges overlap. Reordering the steps changes the table.

use crate::char_class::CharClass::{self, *};
use crate::options::{
    BoundaryOptions, SkipConnectedBrackets, SkipConnectedOperators, SkipConnectedUnderscores,
    SkipConnectedWhitespace,
};
use crate::table::TransitionTable;

/// Builds [`TransitionTable`]s from [`BoundaryOptions`]
#[derive(Debug, Clone, Copy, Default)]
pub struct TableBuilder;

impl TableBuilder {
    /// Build the table for `options`
    ///
    /// Pure and deterministic: equal options give bit-identical tables.
    pub fn build(options: &BoundaryOptions) -> TransitionTable {
        let mut table = TransitionTable::filled(true);

        // A run of one class never splits internally
        for class in CharClass::ALL {
            table.set_range(class, class, false);
        }

        if options.recognize_pascal {
            table.set_range(Uppercase, Lowercase, false);

            if options.stop_between_upper_and_pascal {
                table.set(Uppercase, Uppercase, Lowercase, true);
            }
        }

        if options.stop_between_operators {
            table.set_range(Operator, Operator, true);
        }

        if options.stop_between_brackets {
            table.set_range(Bracket, Bracket, true);
        }

        if options.stop_between_operators_and_brackets {
            table.set_range(Operator, Bracket, true);
            table.set_range(Bracket, Operator, true);
        }

        match options.skip_connected_whitespace {
            SkipConnectedWhitespace::Never => {}
            SkipConnectedWhitespace::BeforeAnything => {
                for class in CharClass::ALL {
                    table.set_range(Whitespace, class, false);
                }
            }
            SkipConnectedWhitespace::AfterAnything => {
                for class in CharClass::ALL {
                    table.set_range(class, Whitespace, false);
                }
            }
        }

        match options.skip_connected_underscores {
            SkipConnectedUnderscores::Never => {}
            SkipConnectedUnderscores::BeforeSubwords => {
                clear_after(&mut table, Underscore, &[Uppercase, Lowercase]);
            }
            SkipConnectedUnderscores::AfterSubwords => {
                clear_before(&mut table, Underscore, &[Uppercase, Lowercase]);
            }
        }

        match options.skip_connected_operators {
            SkipConnectedOperators::Never => {}
            SkipConnectedOperators::BeforeWords => {
                clear_after(&mut table, Operator, &[Uppercase, Lowercase, Underscore]);
            }
            SkipConnectedOperators::AfterWords => {
                clear_before(&mut table, Operator, &[Uppercase, Lowercase, Underscore]);
            }
        }

        match options.skip_connected_brackets {
            SkipConnectedBrackets::Never => {}
            SkipConnectedBrackets::BeforeWords => {
                clear_after(&mut table, Bracket, &[Uppercase, Lowercase]);
            }
            SkipConnectedBrackets::AfterWords => {
                clear_before(&mut table, Bracket, &[Uppercase, Lowercase]);
            }
        }

        // Trailing whitespace never stops at the line break itself
        table.set_range(Whitespace, Linebreak, false);

        table
    }
}

/// `glue` attaches to the word classes that follow it
fn clear_after(table: &mut TransitionTable, glue: CharClass, words: &[CharClass]) {
    for &word in words {
        table.set_range(glue, word, false);
    }
}

/// `glue` attaches to the word classes that precede it
fn clear_before(table: &mut TransitionTable, glue: CharClass, words: &[CharClass]) {
    for &word in words {
        table.set_range(word, glue, false);
    }
}

impl From<&BoundaryOptions> for TransitionTable {
    fn from(options: &BoundaryOptions) -> Self {
        TableBuilder::build(options)
    }
}
