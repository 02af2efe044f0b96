#[cfg(feature = "tracing")]
macro_rules! ktrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "keyboard_space", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! ktrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! kdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "keyboard_space", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! kdebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! kwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "keyboard_space", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! kwarn {
    ($($tt:tt)*) => {};
}
