use crate::error::DeskError;

pub type DeskResult<T> = Result<T, DeskError>;
