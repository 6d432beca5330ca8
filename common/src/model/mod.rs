pub mod record;
pub mod toolbox;
pub mod tune;
