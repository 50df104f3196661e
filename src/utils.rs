/// `log::trace!`, but only compiled in with the `log` feature.
macro_rules! re_trace {
    ($($arg:tt)+) => {{
        #[cfg(feature = "log")]
        {
            log::trace!($($arg)+);
        }
    }};
}
pub(crate) use re_trace;

/// `log::debug!`, but only compiled in with the `log` feature.
macro_rules! re_debug {
    ($($arg:tt)+) => {{
        #[cfg(feature = "log")]
        {
            log::debug!($($arg)+);
        }
    }};
}

/// Counts and times a single search for the `log` feature. Does nothing without it.
#[derive(Debug)]
#[cfg_attr(not(feature = "log"), allow(dead_code))]
pub(crate) struct SearchStats {
    pub expanded: usize,
    pub pushed: usize,
    #[cfg(feature = "log")]
    started: std::time::Instant,
}

impl SearchStats {
    pub fn start() -> SearchStats {
        SearchStats {
            expanded: 0,
            pushed: 1,
            #[cfg(feature = "log")]
            started: std::time::Instant::now(),
        }
    }

    #[allow(unused_variables)]
    pub fn finish(&self, start: crate::NodeID, goal: crate::NodeID, found: bool) {
        re_debug!(
            "search {} -> {}: {} after expanding {} of {} queued entries in {:?}",
            start,
            goal,
            if found { "found" } else { "no path" },
            self.expanded,
            self.pushed,
            self.started.elapsed()
        );
    }
}
