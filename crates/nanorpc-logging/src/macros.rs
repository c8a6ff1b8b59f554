//! ---
//! nrpc_section: "02-logging"
//! nrpc_subsection: "module"
//! nrpc_type: "source"
//! nrpc_scope: "code"
//! nrpc_description: "Structured logging adapters and sinks."
//! nrpc_version: "v1.1.1"
//! nrpc_owner: "tbd"
//! ---
//! Logging macros that attach a [`LogContext`](crate::LogContext) to each event.

#[doc(hidden)]
#[macro_export]
macro_rules! __rpc_event {
    ($level:expr, $ctx:expr, $($arg:tt)+) => {{
        let ctx = &$ctx;
        $crate::tracing::event!(
            $level,
            component = ctx.component.unwrap_or(""),
            peer = ctx.peer.unwrap_or(""),
            local_version = ctx.local_version.unwrap_or(""),
            peer_version = ctx.peer_version.unwrap_or(""),
            message = %format_args!($($arg)+)
        );
    }};
}

/// Emit an informational log enriched with handshake context.
#[macro_export]
macro_rules! rpc_info {
    (context = $ctx:expr, $($arg:tt)+) => {
        $crate::__rpc_event!($crate::tracing::Level::INFO, $ctx, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__rpc_event!($crate::tracing::Level::INFO, $crate::LogContext::default(), $($arg)+)
    };
}

/// Emit a debug log enriched with handshake context.
#[macro_export]
macro_rules! rpc_debug {
    (context = $ctx:expr, $($arg:tt)+) => {
        $crate::__rpc_event!($crate::tracing::Level::DEBUG, $ctx, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__rpc_event!($crate::tracing::Level::DEBUG, $crate::LogContext::default(), $($arg)+)
    };
}

/// Emit a warning enriched with handshake context.
#[macro_export]
macro_rules! rpc_warn {
    (context = $ctx:expr, $($arg:tt)+) => {
        $crate::__rpc_event!($crate::tracing::Level::WARN, $ctx, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__rpc_event!($crate::tracing::Level::WARN, $crate::LogContext::default(), $($arg)+)
    };
}

/// Emit an error log enriched with handshake context.
#[macro_export]
macro_rules! rpc_error {
    (context = $ctx:expr, $($arg:tt)+) => {
        $crate::__rpc_event!($crate::tracing::Level::ERROR, $ctx, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__rpc_event!($crate::tracing::Level::ERROR, $crate::LogContext::default(), $($arg)+)
    };
}
