pub mod classify;
pub mod validate;
pub mod operation;
pub mod report;
pub mod config;
pub mod logger;

pub use classify::{classify_number, NumberClass};
pub use operation::{Evaluation, Operation};
pub use validate::{validate_and_process_value, ValueRange};

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_documented_scenarios() {
        assert_eq!(classify_number(-5), -1);
        assert_eq!(classify_number(0), 0);
        assert_eq!(classify_number(150), 100);
        assert_eq!(classify_number(50), 50);

        assert_eq!(validate_and_process_value(-150), -100);
        assert_eq!(validate_and_process_value(-50), 50);
        assert_eq!(validate_and_process_value(2000), 1000);
        assert_eq!(validate_and_process_value(500), 250);
    }

    #[test]
    fn test_concurrent_calls_agree() {
        let handles: Vec<_> = (0..4)
            .map(|t| {
                thread::spawn(move || {
                    (-2000..2000)
                        .map(|v| (classify_number(v + t), validate_and_process_value(v + t)))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for (t, handle) in handles.into_iter().enumerate() {
            let results = handle.join().unwrap();
            for (i, (c, v)) in results.into_iter().enumerate() {
                let input = i as i32 - 2000 + t as i32;
                assert_eq!(c, classify_number(input));
                assert_eq!(v, validate_and_process_value(input));
            }
        }
    }
}
