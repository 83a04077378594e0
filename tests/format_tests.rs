use chrono::TimeZone;
use chrono::Utc;
use num_bigint::BigInt;
use serde_con::{
    con, decode_to_value, normalize, to_string, to_string_with_options, Delimiter, EncodeOptions,
    Value,
};

fn round_trips(value: &Value) {
    let text = to_string(value).unwrap();
    assert_eq!(decode_to_value(&text).unwrap(), normalize(value), "{text}");
}

#[test]
fn flat_object() {
    let value = con!({ "name": "John", "age": 30, "active": true });
    assert_eq!(
        to_string(&value).unwrap(),
        "name: John\nage: 30\nactive: true"
    );
    round_trips(&value);
}

#[test]
fn tabular_array() {
    let value = con!({ "users": [
        { "name": "Alice", "age": 30, "city": "NYC" },
        { "name": "Bob", "age": 25, "city": "SF" }
    ]});
    assert_eq!(
        to_string(&value).unwrap(),
        "users[2]{name,age,city}:\n  Alice,30,NYC\n  Bob,25,SF"
    );
    round_trips(&value);
}

#[test]
fn inline_array() {
    let value = con!({ "tags": ["a", "b", "c"] });
    assert_eq!(to_string(&value).unwrap(), "tags[3]: a,b,c");
    round_trips(&value);
}

#[test]
fn nested_objects() {
    let value = con!({ "a": { "b": { "c": 1 } } });
    assert_eq!(to_string(&value).unwrap(), "a:\n  b:\n    c: 1");
    round_trips(&value);
}

#[test]
fn mixed_list() {
    let value = con!({ "mixed": [1, "x", { "k": true }] });
    assert_eq!(
        to_string(&value).unwrap(),
        "mixed[3]:\n  - 1\n  - x\n  - k: true"
    );
    round_trips(&value);
}

#[test]
fn list_of_primitive_arrays() {
    let value = con!({ "m": [[1, 2], [3], []] });
    assert_eq!(
        to_string(&value).unwrap(),
        "m[3]:\n  - [2]: 1,2\n  - [1]: 3\n  - [0]:"
    );
    round_trips(&value);
}

#[test]
fn empty_collections() {
    assert_eq!(to_string(&con!({ "arr": [] })).unwrap(), "arr[0]:");
    assert_eq!(to_string(&con!({ "obj": {} })).unwrap(), "obj:");
    assert_eq!(to_string(&con!([])).unwrap(), "[0]:");
    round_trips(&con!({ "arr": [], "obj": {}, "after": 1 }));
}

#[test]
fn primitive_documents() {
    assert_eq!(to_string(&con!(42)).unwrap(), "42");
    assert_eq!(to_string(&con!("hello world")).unwrap(), "hello world");
    assert_eq!(to_string(&con!(null)).unwrap(), "null");
    assert_eq!(to_string(&con!("")).unwrap(), "\"\"");
    round_trips(&con!("true"));
    round_trips(&con!(-2.5));
}

#[test]
fn quoting_rules() {
    let value = con!({
        "plain": "hello world",
        "comma": "a,b",
        "colon": "a:b",
        "padded": " padded ",
        "boolish": "true",
        "numberish": "123",
        "zeros": "007",
        "dash": "- item",
        "empty": "",
        "escapes": "line1\nline2\t\"quoted\""
    });
    let expected = concat!(
        "plain: hello world\n",
        "comma: \"a,b\"\n",
        "colon: \"a:b\"\n",
        "padded: \" padded \"\n",
        "boolish: \"true\"\n",
        "numberish: \"123\"\n",
        "zeros: \"007\"\n",
        "dash: \"- item\"\n",
        "empty: \"\"\n",
        "escapes: \"line1\\nline2\\t\\\"quoted\\\"\""
    );
    assert_eq!(to_string(&value).unwrap(), expected);
    round_trips(&value);
}

#[test]
fn pipe_delimiter() {
    let options = EncodeOptions::new().with_delimiter(Delimiter::Pipe);
    let inline = con!({ "tags": ["a", "b,c", "d"] });
    assert_eq!(
        to_string_with_options(&inline, &options).unwrap(),
        "tags[3|]: a|b,c|d"
    );

    let table = con!({ "rows": [
        { "name": "Alice", "age": 30 },
        { "name": "Bob", "age": 25 }
    ]});
    assert_eq!(
        to_string_with_options(&table, &options).unwrap(),
        "rows[2|]{name|age}:\n  Alice|30\n  Bob|25"
    );
    let text = to_string_with_options(&table, &options).unwrap();
    assert_eq!(decode_to_value(&text).unwrap(), normalize(&table));
}

#[test]
fn tab_delimiter() {
    let options = EncodeOptions::new().with_delimiter(Delimiter::Tab);
    let value = con!({ "nums": [1, 2, 3] });
    let text = to_string_with_options(&value, &options).unwrap();
    assert_eq!(text, "nums[3\t]: 1\t2\t3");
    assert_eq!(decode_to_value(&text).unwrap(), normalize(&value));
}

#[test]
fn length_marker() {
    let options = EncodeOptions::new().with_length_marker(true);
    let value = con!({ "tags": ["rust", "serde"] });
    let text = to_string_with_options(&value, &options).unwrap();
    assert_eq!(text, "tags[#2]: rust,serde");
    assert_eq!(decode_to_value(&text).unwrap(), normalize(&value));
}

#[test]
fn tabular_threshold() {
    let short = con!({ "rows": [{ "a": 1 }] });
    assert_eq!(to_string(&short).unwrap(), "rows[1]:\n  - a: 1");
    round_trips(&short);

    let eager = EncodeOptions::new().with_min_tabular_length(1);
    assert_eq!(
        to_string_with_options(&short, &eager).unwrap(),
        "rows[1]{a}:\n  1"
    );
}

#[test]
fn column_order_comes_from_first_row() {
    let value = con!({ "rows": [
        { "b": 1, "a": 2 },
        { "a": 3, "b": 4 }
    ]});
    assert_eq!(
        to_string(&value).unwrap(),
        "rows[2]{b,a}:\n  1,2\n  4,3"
    );
    round_trips(&value);
}

#[test]
fn quoted_columns_and_cells() {
    let value = con!({ "rows": [
        { "full name": "Ada Lovelace", "note": "a,b" },
        { "full name": "Grace Hopper", "note": "x:y" }
    ]});
    assert_eq!(
        to_string(&value).unwrap(),
        "rows[2]{\"full name\",note}:\n  Ada Lovelace,\"a,b\"\n  Grace Hopper,\"x:y\""
    );
    round_trips(&value);
}

#[test]
fn quoted_key_arrays_nest_headless() {
    let value = con!({ "my key": [1, 2] });
    assert_eq!(to_string(&value).unwrap(), "\"my key\":\n  [2]: 1,2");
    round_trips(&value);
}

#[test]
fn list_item_objects_with_nested_bodies() {
    let value = con!({ "items": [
        { "meta": { "x": 1 }, "name": "first" },
        { "tags": ["a", "b"], "name": "second" }
    ]});
    assert_eq!(
        to_string(&value).unwrap(),
        concat!(
            "items[2]:\n",
            "  - meta:\n",
            "      x: 1\n",
            "    name: first\n",
            "  - tags[2]: a,b\n",
            "    name: second"
        )
    );
    round_trips(&value);
}

#[test]
fn empty_object_items_are_bare_dashes() {
    let value = con!({ "items": [{}, {}] });
    assert_eq!(to_string(&value).unwrap(), "items[2]:\n  -\n  -");
    round_trips(&value);
}

#[test]
fn dates_lower_to_quoted_iso_strings() {
    let date = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
    let mut map = serde_con::ConMap::new();
    map.insert("created".to_string(), Value::Date(date));
    let value = Value::Object(map);
    assert_eq!(
        to_string(&value).unwrap(),
        "created: \"2024-01-15T10:30:00+00:00\""
    );
    round_trips(&value);
}

#[test]
fn bigints_lower_by_magnitude() {
    let mut map = serde_con::ConMap::new();
    map.insert("small".to_string(), Value::BigInt(BigInt::from(42)));
    map.insert(
        "huge".to_string(),
        Value::BigInt(BigInt::from(9_007_199_254_740_993_i64)),
    );
    let value = Value::Object(map);
    assert_eq!(
        to_string(&value).unwrap(),
        "small: 42\nhuge: \"9007199254740993\""
    );
    round_trips(&value);
}

#[test]
fn non_finite_numbers_lower_to_null() {
    let value = con!({ "a": (f64::NAN), "b": (f64::INFINITY), "c": (-0.0) });
    assert_eq!(to_string(&value).unwrap(), "a: null\nb: null\nc: 0");
    round_trips(&value);
}

#[test]
fn emission_is_deterministic() {
    let value = con!({
        "users": [
            { "name": "Alice", "age": 30 },
            { "name": "Bob", "age": 25 }
        ],
        "tags": ["x", "y"],
        "nested": { "deep": { "deeper": [1, [2, 3]] } }
    });
    let first = to_string(&value).unwrap();
    let second = to_string(&value).unwrap();
    assert_eq!(first, second);
    round_trips(&value);
}
