use serde_json::Value;
use tabled::{builder::Builder, Table};

/// Format output as tables using the tabled crate.
///
/// Scalar fields render as one Field/Value table; breakdown arrays (yearly
/// breakdowns, amortization previews, bracket walks, performer lists) each
/// render as their own table underneath, titled by field name.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            let mut builder = Builder::default();
            builder.push_record(["Field", "Value"]);
            let mut arrays: Vec<(&str, &Vec<Value>)> = Vec::new();

            for (key, val) in map {
                match val {
                    Value::Array(arr) => arrays.push((key.as_str(), arr)),
                    _ => builder.push_record([key.as_str(), &format_value(val)]),
                }
            }

            let table = Table::from(builder);
            println!("{}", table);

            for (name, arr) in arrays {
                println!("\n{}:", name);
                print_array_table(arr);
            }
        }
        Value::Array(arr) => {
            print_array_table(arr);
        }
        _ => {
            println!("{}", value);
        }
    }
}

fn print_array_table(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    let mut builder = Builder::default();

    // Headers from the first object's keys
    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
        builder.push_record(headers.clone());

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(*h).map(format_value).unwrap_or_default())
                    .collect();
                builder.push_record(row);
            }
        }
    } else {
        for item in arr {
            builder.push_record([format_value(item)]);
        }
    }

    let table = Table::from(builder);
    println!("{}", table);
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}
