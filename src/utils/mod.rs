// Utils compartidos

pub mod constants;
pub mod i18n;
