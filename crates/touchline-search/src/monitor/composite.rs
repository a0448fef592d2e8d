// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::{
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    stats::CountStatistics,
};
use touchline_model::grid::Grid;

/// A composite monitor that forwards every event to all of its monitors.
///
/// `search_command` returns the first `Terminate` in insertion order.
pub struct CompositeMonitor<'a> {
    monitors: Vec<Box<dyn SearchMonitor + 'a>>,
}

impl<'a> std::fmt::Debug for CompositeMonitor<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeMonitor")
            .field("monitors", &self.names().join(", "))
            .finish()
    }
}

impl<'a> std::fmt::Display for CompositeMonitor<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CompositeMonitor([{}])", self.names().join(", "))
    }
}

impl<'a> Default for CompositeMonitor<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CompositeMonitor<'a> {
    #[inline]
    pub fn new() -> CompositeMonitor<'a> {
        CompositeMonitor {
            monitors: Vec::new(),
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> CompositeMonitor<'a> {
        CompositeMonitor {
            monitors: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: SearchMonitor + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }

    fn names(&self) -> Vec<&str> {
        self.monitors.iter().map(|m| m.name()).collect()
    }
}

impl<'a> SearchMonitor for CompositeMonitor<'a> {
    fn name(&self) -> &str {
        "CompositeMonitor"
    }

    fn on_enter_search(&mut self, grid: &Grid) {
        for monitor in &mut self.monitors {
            monitor.on_enter_search(grid);
        }
    }

    fn on_exit_search(&mut self, statistics: &CountStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_exit_search(statistics);
        }
    }

    fn on_path_found(&mut self) {
        for monitor in &mut self.monitors {
            monitor.on_path_found();
        }
    }

    fn on_step(&mut self) {
        for monitor in &mut self.monitors {
            monitor.on_step();
        }
    }

    fn search_command(&self) -> SearchCommand {
        // Called after every step; a plain loop avoids building an iterator chain.
        for monitor in &self.monitors {
            if let SearchCommand::Terminate(reason) = monitor.search_command() {
                return SearchCommand::Terminate(reason);
            }
        }
        SearchCommand::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::{interrupt::InterruptMonitor, no_op::NoOpMonitor};
    use std::sync::atomic::{AtomicBool, Ordering};

    #[derive(Default)]
    struct CountingMonitor {
        entered: usize,
        exited: usize,
        steps: usize,
        paths: usize,
        stop_after: Option<usize>,
    }

    impl SearchMonitor for CountingMonitor {
        fn name(&self) -> &str {
            "CountingMonitor"
        }
        fn on_enter_search(&mut self, _grid: &Grid) {
            self.entered += 1;
        }
        fn on_exit_search(&mut self, _statistics: &CountStatistics) {
            self.exited += 1;
        }
        fn on_path_found(&mut self) {
            self.paths += 1;
        }
        fn on_step(&mut self) {
            self.steps += 1;
        }
        fn search_command(&self) -> SearchCommand {
            match self.stop_after {
                Some(limit) if self.steps >= limit => {
                    SearchCommand::Terminate(format!("stopped after {}", limit))
                }
                _ => SearchCommand::Continue,
            }
        }
    }

    #[test]
    fn test_empty_composite_continues() {
        let composite = CompositeMonitor::new();
        assert!(composite.is_empty());
        assert_eq!(composite.search_command(), SearchCommand::Continue);
    }

    #[test]
    fn test_forwards_events_to_all_monitors() {
        let grid = Grid::open(2, 2).unwrap();
        let mut first = CountingMonitor::default();
        let mut second = CountingMonitor::default();
        {
            let mut composite = CompositeMonitor::with_capacity(2);
            composite.add_monitor(&mut first);
            composite.add_monitor(&mut second);
            assert!(!composite.is_empty());

            composite.on_enter_search(&grid);
            composite.on_step();
            composite.on_step();
            composite.on_path_found();
            composite.on_exit_search(&CountStatistics::default());
        }
        for m in [&first, &second] {
            assert_eq!((m.entered, m.steps, m.paths, m.exited), (1, 2, 1, 1));
        }
    }

    #[test]
    fn test_first_terminate_wins() {
        let flag = AtomicBool::new(false);
        let mut composite = CompositeMonitor::new();
        composite.add_monitor(NoOpMonitor::new());
        composite.add_monitor(CountingMonitor {
            stop_after: Some(1),
            ..Default::default()
        });
        composite.add_monitor(InterruptMonitor::new(&flag));

        assert_eq!(composite.search_command(), SearchCommand::Continue);
        flag.store(true, Ordering::Relaxed);
        composite.on_step();
        assert_eq!(
            composite.search_command(),
            SearchCommand::Terminate("stopped after 1".to_string())
        );
    }

    #[test]
    fn test_display_lists_monitor_names() {
        let mut composite = CompositeMonitor::new();
        composite.add_monitor(NoOpMonitor::new());
        composite.add_monitor(CountingMonitor::default());
        assert_eq!(
            format!("{}", composite),
            "CompositeMonitor([NoOpMonitor, CountingMonitor])"
        );
    }
}
