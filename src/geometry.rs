pub mod basis;
pub mod stations;
pub mod distances2;
