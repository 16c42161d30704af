use crate::support::{USAGE_EXIT, fail, to_pretty_json};

pub fn run(rule: String, inputs: Vec<String>, json_output: bool) {
    let predicate = chainkit_validator::get(&rule).unwrap_or_else(|e| fail(e, USAGE_EXIT));

    let results: Vec<(String, bool)> = inputs
        .into_iter()
        .map(|input| {
            let valid = predicate(&input);
            (input, valid)
        })
        .collect();
    let passed = results.iter().all(|(_, valid)| *valid);
    tracing::debug!(rule = %rule, checked = results.len(), passed, "validated inputs");

    if json_output {
        let payload = serde_json::json!({
            "rule": rule,
            "passed": passed,
            "results": results
                .iter()
                .map(|(input, valid)| serde_json::json!({ "input": input, "valid": valid }))
                .collect::<Vec<_>>(),
        });
        println!("{}", to_pretty_json(&payload));
    } else {
        println!("chainkit validate {rule}");
        for (input, valid) in &results {
            let mark = if *valid { "ok  " } else { "FAIL" };
            println!("  {mark} {input}");
        }
    }

    if !passed {
        std::process::exit(1);
    }
}
