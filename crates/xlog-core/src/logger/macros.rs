//! Convenience macros that take values directly instead of a slice

/// Log any `Display` values at a level id
///
/// ```
/// use xlog_core::{xlog, XLogger};
///
/// let logger = XLogger::new('d', Some("db"));
/// xlog!(logger, 'd', "rows", 12);
/// ```
#[macro_export]
macro_rules! xlog {
    ($logger:expr, $level:expr, $($value:expr),+ $(,)?) => {
        $logger.log(
            $level,
            &[$(&$value as &dyn ::std::fmt::Display),+],
            $crate::LogOptions::default(),
        )
    };
}

#[macro_export]
macro_rules! xlog_m {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $crate::xlog!($logger, 'm', $($value),+)
    };
}

#[macro_export]
macro_rules! xlog_e {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $crate::xlog!($logger, 'e', $($value),+)
    };
}

#[macro_export]
macro_rules! xlog_w {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $crate::xlog!($logger, 'w', $($value),+)
    };
}

#[macro_export]
macro_rules! xlog_i {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $crate::xlog!($logger, 'i', $($value),+)
    };
}

#[macro_export]
macro_rules! xlog_d {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $crate::xlog!($logger, 'd', $($value),+)
    };
}

#[macro_export]
macro_rules! xlog_v {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $crate::xlog!($logger, 'v', $($value),+)
    };
}
