#[cfg(feature = "tracing")]
macro_rules! igtrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "inset_guard", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! igtrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! igdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "inset_guard", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! igdebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! igwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "inset_guard", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! igwarn {
    ($($tt:tt)*) => {};
}
