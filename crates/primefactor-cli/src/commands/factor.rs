use primefactor_core::{CollectSink, PrimeFactor};

pub fn run(number: &str, trace: bool, json: bool) {
    let n = super::parse_or_exit(number);

    let mut sink = CollectSink::new();
    let result = if trace {
        PrimeFactor::compute(&n, &mut sink)
    } else {
        primefactor_core::find_factor(&n, false)
    };

    // Trace goes to stderr under --json so stdout stays machine-readable.
    for line in sink.lines() {
        if json {
            eprintln!("  {line}");
        } else {
            println!("  {line}");
        }
    }

    let record = match result {
        Ok(record) => record,
        Err(e) => super::fail(&e),
    };

    if json {
        match serde_json::to_string_pretty(&record) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Error serializing result: {e}");
                std::process::exit(super::EXIT_FAILURE);
            }
        }
        return;
    }

    if trace {
        println!();
    }
    for line in summary(&record) {
        println!("{line}");
    }
}

/// Human-readable result lines for one record.
fn summary(record: &PrimeFactor) -> [String; 2] {
    let result = if record.factors.is_empty() {
        format!("{} has no prime factors", record.number)
    } else {
        format!("{} = {}", record.number, record.factors)
    };
    [
        result,
        format!("Duration: {}", super::format_duration(record.elapsed())),
    ]
}
