pub mod generate;
pub mod header;
pub mod overrides;

#[cfg(test)]
mod overrides_tests;
