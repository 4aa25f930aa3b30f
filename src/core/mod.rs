pub mod calculator;
pub mod session;

pub use crate::domain::model::Operator;
pub use crate::domain::ports::{ConfigProvider, Console};
pub use crate::utils::error::Result;
