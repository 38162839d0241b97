//! Common source text fixtures for tests.

// Flat token lists
pub const SINGLE_ARG: &str = "text-lg";
pub const UTILITY_CLASSES: &str = "p-2.hover:md text-lg mt-1@print";

// Nested groups
pub const NESTED_GROUPS: &str = "a {b.c {d e:f}} g";
pub const DEEPLY_NESTED: &str = "{{{a}}} b";

// Quoting
pub const QUOTED_PARTS: &str = "`my name`.`a.b` c.`x y`";
