// Copyright (C) Brian G. Milnes 2025

//! Run-wide counter behind the `__INDEX__` placeholder

pub mod counter {

    /// Single counter shared by every file of one batch run.
    ///
    /// The driver owns it and lends it to the rewriter, so values are
    /// handed out in processing order: file by file, line by line,
    /// left to right within a template.
    #[derive(Debug, Default)]
    pub struct RunCounter {
        next: u64,
    }

    impl RunCounter {
        pub fn new() -> Self {
            RunCounter { next: 0 }
        }

        /// Return the current value and advance by one
        pub fn next_value(&mut self) -> u64 {
            let value = self.next;
            self.next += 1;
            value
        }

        /// Value the next substitution will receive
        pub fn current(&self) -> u64 {
            self.next
        }
    }
}
