// Copyright 2023 Datafuse Labs.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use leptjson::{parse_value, Object, Value, ValueType};

fn parse(s: &str) -> Value {
    parse_value(s.as_bytes()).unwrap()
}

#[test]
fn test_access_null() {
    let mut v = Value::default();
    v.set_string("a");
    v.set_null();
    assert_eq!(v.value_type(), ValueType::Null);
}

#[test]
fn test_access_boolean() {
    let mut v = Value::default();
    v.set_bool(true);
    assert_eq!(v.value_type(), ValueType::True);
    assert_eq!(v.as_bool(), Some(true));
    v.set_bool(false);
    assert_eq!(v.value_type(), ValueType::False);
    assert_eq!(v.as_bool(), Some(false));
}

#[test]
fn test_access_number() {
    let mut v = Value::default();
    v.set_number(123.123);
    assert_eq!(v.value_type(), ValueType::Number);
    assert_eq!(v.as_f64(), Some(123.123));
    assert_eq!(v.as_bool(), None);
}

#[test]
fn test_access_string() {
    let mut v = Value::default();
    v.set_string("");
    assert_eq!(v.value_type(), ValueType::String);
    assert_eq!(v.as_str(), Some(""));
    v.set_string("Hello");
    assert_eq!(v.as_str().map(str::len), Some(5));
    assert_eq!(v.as_str(), Some("Hello"));
}

#[test]
fn test_access_object() {
    let mut o = Value::default();
    for _ in 0..2 {
        let obj = o.set_object();
        assert_eq!(obj.len(), 0);
        for (i, key) in ('a'..='j').enumerate() {
            let mut v = Value::default();
            v.set_number(i as f64);
            obj.set_value(&key.to_string()).move_from(&mut v);
            assert!(v.is_null());
        }
        assert_eq!(obj.len(), 10);
        for (i, key) in ('a'..='j').enumerate() {
            let index = obj.find_index(&key.to_string()).unwrap();
            assert_eq!(obj.value(index).and_then(Value::as_f64), Some(i as f64));
        }
    }

    let obj = o.as_object_mut().unwrap();
    let index = obj.find_index("j").unwrap();
    obj.remove_at(index);
    assert_eq!(obj.find_index("j"), None);
    assert_eq!(obj.len(), 9);

    let index = obj.find_index("a").unwrap();
    obj.remove_at(index);
    assert_eq!(obj.find_index("a"), None);
    assert_eq!(obj.len(), 8);

    for (i, key) in ('b'..='i').enumerate() {
        let index = obj.find_index(&key.to_string()).unwrap();
        assert_eq!(index, i);
        assert_eq!(obj.value(index).and_then(Value::as_f64), Some(i as f64 + 1.0));
    }

    let mut v = Value::String("Hello".to_string());
    obj.set_value("World").move_from(&mut v);
    assert_eq!(
        obj.find_value("World").and_then(Value::as_str),
        Some("Hello")
    );
    assert_eq!(obj.key(obj.len() - 1), Some("World"));
}

#[test]
fn test_access_array() {
    let mut v = Value::default();
    let arr = v.set_array();
    for i in 0..5 {
        arr.push(Value::from(i));
    }
    assert_eq!(v.array_length(), Some(5));
    assert_eq!(v.get_index(4), Some(&Value::Number(4.0)));
    assert_eq!(v.get_index(5), None);
    assert_eq!(v.object_length(), None);
}

#[test]
fn test_is_equal() {
    let cases = [
        ("true", "true", true),
        ("true", "false", false),
        ("false", "false", true),
        ("null", "null", true),
        ("null", "0", false),
        ("123", "123", true),
        ("123", "456", false),
        ("0", "-0", true),
        ("1e2", "100", true),
        ("\"abc\"", "\"abc\"", true),
        ("\"abc\"", "\"abcd\"", false),
        ("\"\\u0041\"", "\"A\"", true),
        ("[]", "[]", true),
        ("[]", "null", false),
        ("[1,2,3]", "[1,2,3]", true),
        ("[1,2,3]", "[1,2,3,4]", false),
        ("[1,2,3]", "[3,2,1]", false),
        ("[[]]", "[[]]", true),
        ("{}", "{}", true),
        ("{}", "null", false),
        ("{}", "[]", false),
        (r#"{"a":1,"b":2}"#, r#"{"a":1,"b":2}"#, true),
        (r#"{"a":1,"b":2}"#, r#"{"b":2,"a":1}"#, true),
        (r#"{"a":1,"b":2}"#, r#"{"a":1,"b":3}"#, false),
        (r#"{"a":1,"b":2}"#, r#"{"a":1,"b":2,"c":3}"#, false),
        (r#"{"a":1,"b":2,"c":3}"#, r#"{"a":1,"b":2}"#, false),
        (r#"{"a":1,"b":2}"#, r#"{"a":1,"c":2}"#, false),
        (r#"{"a":{"b":{"c":{}}}}"#, r#"{"a":{"b":{"c":{}}}}"#, true),
        (r#"{"a":{"b":{"c":{}}}}"#, r#"{"a":{"b":{"c":[]}}}"#, false),
        (r#"{"a":1,"a":1}"#, r#"{"a":1,"a":1}"#, true),
        (r#"{"a":1,"a":1}"#, r#"{"a":1,"b":2}"#, false),
        (r#"{"a":1,"b":2}"#, r#"{"a":1,"a":1}"#, false),
        (r#"{"a":1,"a":2}"#, r#"{"a":2,"a":1}"#, false),
    ];
    for (left, right, expected) in cases {
        assert_eq!(
            parse(left) == parse(right),
            expected,
            "{} == {}",
            left,
            right
        );
        assert_eq!(
            parse(right) == parse(left),
            expected,
            "{} == {}",
            right,
            left
        );
    }
}

#[test]
fn test_copy() {
    let src = parse(r#"{"t":true,"f":false,"n":null,"d":1.5,"a":[1,2,3]}"#);
    let mut dst = Value::default();
    dst.copy_from(&src);
    assert_eq!(dst, src);
}

#[test]
fn test_copy_is_deep() {
    let mut src = parse(r#"{"a":[1,2,3],"o":{"k":"v"}}"#);
    let mut dst = Value::Bool(true);
    dst.copy_from(&src);

    let obj = src.as_object_mut().unwrap();
    obj.find_value_mut("a").unwrap().as_array_mut().unwrap()[0].set_number(10.0);
    obj.find_value_mut("o")
        .unwrap()
        .as_object_mut()
        .unwrap()
        .set_value("k")
        .set_null();

    assert_eq!(dst, parse(r#"{"a":[1,2,3],"o":{"k":"v"}}"#));
    assert_ne!(dst, src);
}

#[test]
fn test_move() {
    let v1 = parse(r#"{"t":true,"f":false,"n":null,"d":1.5,"a":[1,2,3]}"#);
    let mut v2 = Value::default();
    v2.copy_from(&v1);
    assert_eq!(v1, v2);

    let mut v3 = Value::default();
    v3.move_from(&mut v2);
    assert_eq!(v2.value_type(), ValueType::Null);
    assert_eq!(v3, v1);
}

#[test]
fn test_swap() {
    let mut v1 = Value::default();
    let mut v2 = Value::default();
    v1.set_string("Hello");
    v2.set_string("World");
    v1.swap_with(&mut v2);
    assert_eq!(v1.as_str(), Some("World"));
    assert_eq!(v2.as_str(), Some("Hello"));

    let mut v3 = parse("[1,[2]]");
    v1.swap_with(&mut v3);
    assert_eq!(v1.array_length(), Some(2));
    assert_eq!(v3.as_str(), Some("World"));
}

#[test]
fn test_enumerate_members() {
    let value = parse(r#"{"x":1,"y":[true],"":null}"#);
    let obj = value.as_object().unwrap();
    let keys: Vec<&str> = obj.keys().collect();
    assert_eq!(keys, vec!["x", "y", ""]);

    let mut types = Vec::new();
    for member in obj {
        types.push(member.value.value_type());
    }
    assert_eq!(
        types,
        vec![ValueType::Number, ValueType::Array, ValueType::Null]
    );

    let rebuilt: Object = obj
        .clone()
        .into_iter()
        .rev()
        .map(|m| (m.key, m.value))
        .collect();
    assert_eq!(Value::Object(rebuilt), value);
}
