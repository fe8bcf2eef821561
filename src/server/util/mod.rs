pub mod db;
pub mod money;
pub mod parse;
