// Every event is emitted under the `loop_carousel` target. Without the `tracing` feature
// the arguments are dropped unexpanded.

#[cfg(feature = "tracing")]
macro_rules! clog {
    ($level:ident, $($tt:tt)*) => {
        tracing::$level!(target: "loop_carousel", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! clog {
    ($level:ident, $($tt:tt)*) => {};
}

macro_rules! ctrace {
    ($($tt:tt)*) => { clog!(trace, $($tt)*) };
}

macro_rules! cdebug {
    ($($tt:tt)*) => { clog!(debug, $($tt)*) };
}

macro_rules! cwarn {
    ($($tt:tt)*) => { clog!(warn, $($tt)*) };
}
