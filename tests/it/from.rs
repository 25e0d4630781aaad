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

use leptjson::parse_value;
use leptjson::to_string;
use leptjson::Object;
use leptjson::Value;
use serde_json::Value as JsonValue;

#[test]
fn test_from_serde_json_and_back() {
    let sources = vec![
        r#"null"#,
        r#"[true,false,0,-1.5,1e20,"abc"]"#,
        r#"{"a":{"b":[1,2,{"c":"¢"}]},"d":""}"#,
    ];
    for s in sources {
        let json: JsonValue = serde_json::from_str(s).unwrap();
        let value = parse_value(s.as_bytes()).unwrap();
        assert_eq!(Value::from(json.clone()), value, "converting {}", s);
        assert_eq!(JsonValue::from(&value), json, "converting {}", s);
    }
}

#[test]
fn test_from_keeps_member_order() {
    let value = parse_value(br#"{"z":1,"a":2,"m":3}"#).unwrap();
    let json = JsonValue::from(value);
    assert_eq!(serde_json::to_string(&json).unwrap(), r#"{"z":1,"a":2,"m":3}"#);
}

#[test]
fn test_build_with_from() {
    let obj: Object = vec![
        ("name", Value::from("leptjson")),
        ("tags", Value::from(vec!["json", "rfc8259"])),
        ("stars", Value::from(42u32)),
        ("score", Value::from(Some(0.5))),
        ("owner", Value::from(None::<String>)),
    ]
    .into_iter()
    .collect();
    let value = Value::from(obj);
    assert_eq!(
        to_string(&value),
        r#"{"name":"leptjson","tags":["json","rfc8259"],"stars":42,"score":0.5,"owner":null}"#
    );
    assert_eq!(serde_json::to_string(&value).unwrap(), to_string(&value));
}
