pub mod hangul;
pub mod sink;
pub mod table;
pub mod translit;
pub mod unicode;
pub mod utf8;
