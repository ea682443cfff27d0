/// Prints a progress line for the scraper: `"{local timestamp:<30} : {message}"`.
///
/// Every line the scraper reports goes through here: the letter and page being
/// requested, the running total, the end of a letter and the final summary.
/// Pass a starting time first and the elapsed seconds are printed on a second
/// `RUNTIME:` line, which is how per-letter and whole-run durations are shown.
/// ```
/// use medscrap::info_time;
///
/// let letter_start = chrono::Local::now();
/// info_time!("Scraping letter '{}', page {}...", 'A', 1);
/// info_time!("Total medications collected so far: {}", 42);
/// info_time!(letter_start, "No more data for letter '{}'. Moving on.", 'A');
/// ```
#[macro_export]
macro_rules! info_time {
    ($strfm:literal $(,)? $($arg:expr),*) => {{
        let local_now = ::chrono::Local::now();
        let res = format!("{:<30} : {}", local_now, format!($strfm, $($arg),*));
        println!("{}", res);
    }};
    ($time:expr, $strfm:literal $(,)? $($arg:expr),*) => {{
        let local_now = ::chrono::Local::now();
        let run_time = (local_now - $time)
                .num_microseconds()
                .map(|n| n as f64 / 1_000_000.0)
                .unwrap_or(0.0);
        let res = format!("{:<30} : {}\nRUNTIME: {} sec", local_now, format!($strfm, $($arg),*), run_time);
        println!("{}", res);
    }};
}
