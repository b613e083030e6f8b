use crate::operation::GeneratorConfig;
use crate::operation::OperationGenerator;
use crate::operation::OperationKind;
use crate::test_utils::schema_from_sdl;
use crate::Value;

#[test]
fn display_matches_graphql_string() {
    let schema = schema_from_sdl("type Query { ping(times: Int!): String }");
    let operations = OperationGenerator::new(&schema, &GeneratorConfig::default()).generate();
    let doc = &operations.queries()[0];
    assert_eq!(doc.to_string(), doc.to_graphql_string());
    assert_eq!(doc.to_string(), "query {\n  ping(times: 0)\n}\n");
}

#[test]
fn root_field_exposes_arguments() {
    let schema = schema_from_sdl(r#"
        type Query { lookup(key: ID!, tags: [String!]!, exact: Boolean, mode: Mode): Int }
        enum Mode { FAST SLOW }
    "#);
    let operations = OperationGenerator::new(&schema, &GeneratorConfig::default()).generate();
    let doc = &operations.queries()[0];
    assert_eq!(doc.operation_kind(), OperationKind::Query);
    assert!(doc.root_field().selection_set().is_none());

    let arguments = doc.root_field().arguments();
    assert_eq!(arguments.get("key"), Some(&Value::String("id".to_string())));
    assert_eq!(
        arguments.get("tags"),
        Some(&Value::List(vec![Value::String("string".to_string())])),
    );
    assert_eq!(arguments.get("exact"), Some(&Value::Bool(true)));
    assert_eq!(arguments.get("mode"), Some(&Value::Enum("FAST".to_string())));
    assert_eq!(
        doc.to_graphql_string(),
        "query {\n  lookup(key: \"id\", tags: [\"string\"], exact: true, mode: FAST)\n}\n",
    );
}

#[test]
fn subscription_keyword() {
    let schema = schema_from_sdl(r#"
        type Query { ok: Boolean }
        type Subscription { ticks: Int }
    "#);
    let operations = OperationGenerator::new(&schema, &GeneratorConfig::default()).generate();
    assert_eq!(
        operations.subscriptions()[0].to_graphql_string(),
        "subscription {\n  ticks\n}\n",
    );
}

#[test]
fn string_literals_are_escaped() {
    assert_eq!(
        Value::String("say \"hi\"\n".to_string()).to_string(),
        r#""say \"hi\"\n""#,
    );
    assert_eq!(Value::Object(Default::default()).to_string(), "{}");
    assert_eq!(Value::Null.to_string(), "null");
}
