use crate::operation::GeneratorConfig;
use crate::operation::OperationGenerator;
use crate::operation::Selection;
use crate::operation::SelectionSetBuilder;
use crate::test_utils::schema_from_sdl;
use std::collections::HashSet;

const SEARCH_SDL: &str = r#"
    type Query {
        node(id: ID!): Node
        search(term: String!): [SearchResult!]!
    }
    interface Node { id: ID! }
    type Post implements Node { id: ID! title: String author: User }
    type User implements Node { id: ID! name: String posts: [Post!] }
    union SearchResult = Post | User
"#;

fn render_query(sdl: &str, max_depth: usize, root_field_name: &str) -> String {
    let schema = schema_from_sdl(sdl);
    let operations = OperationGenerator::new(&schema, &GeneratorConfig { max_depth }).generate();
    operations.queries()
        .iter()
        .find(|doc| doc.root_field_name() == root_field_name)
        .unwrap()
        .to_graphql_string()
}

#[test]
fn self_referential_object_is_not_reentered() {
    let rendered = render_query(
        "type Query { node: Node } type Node { id: ID next: Node children: [Node!] }",
        5,
        "node",
    );
    assert_eq!(rendered, "query {\n  node {\n    id\n  }\n}\n");
}

#[test]
fn depth_bound_omits_deeper_fields() {
    let sdl = r#"
        type Query { start: T0 }
        type T0 { v: Int next: T1 }
        type T1 { v: Int next: T2 }
        type T2 { v: Int next: T3 }
        type T3 { v: Int next: T4 }
        type T4 { v: Int }
    "#;
    let schema = schema_from_sdl(sdl);
    for max_depth in 1..=6 {
        let operations =
            OperationGenerator::new(&schema, &GeneratorConfig { max_depth }).generate();
        let depth = operations.queries()[0]
            .root_field()
            .selection_set()
            .unwrap()
            .depth();
        assert_eq!(depth, max_depth.min(5), "max_depth = {max_depth}");
    }

    assert_eq!(
        render_query(sdl, 2, "start"),
        concat!(
            "query {\n",
            "  start {\n",
            "    v\n",
            "    next {\n",
            "      v\n",
            "    }\n",
            "  }\n",
            "}\n",
        ),
    );
}

#[test]
fn zero_max_depth_is_clamped() {
    let schema = schema_from_sdl("type Query { a: A } type A { b: Int }");
    let builder = SelectionSetBuilder::new(&schema, 0);
    assert_eq!(builder.max_depth(), 1);
    assert_eq!(
        render_query("type Query { a: A } type A { b: Int }", 0, "a"),
        "query {\n  a {\n    b\n  }\n}\n",
    );
}

#[test]
fn nothing_selectable_falls_back_to_typename() {
    let rendered = render_query(
        "type Query { loop: Loop } type Loop { again: Loop }",
        5,
        "loop",
    );
    assert_eq!(rendered, "query {\n  loop {\n    __typename\n  }\n}\n");
}

#[test]
fn interface_fragments_select_only_undeclared_fields() {
    assert_eq!(
        render_query(SEARCH_SDL, 5, "node"),
        concat!(
            "query {\n",
            "  node(id: \"id\") {\n",
            "    id\n",
            "    ... on Post {\n",
            "      title\n",
            "      author {\n",
            "        id\n",
            "        name\n",
            "      }\n",
            "    }\n",
            "    ... on User {\n",
            "      name\n",
            "      posts {\n",
            "        id\n",
            "        title\n",
            "      }\n",
            "    }\n",
            "  }\n",
            "}\n",
        ),
    );
}

#[test]
fn union_selects_typename_and_member_fragments() {
    assert_eq!(
        render_query(SEARCH_SDL, 5, "search"),
        concat!(
            "query {\n",
            "  search(term: \"string\") {\n",
            "    __typename\n",
            "    ... on Post {\n",
            "      id\n",
            "      title\n",
            "      author {\n",
            "        id\n",
            "        name\n",
            "      }\n",
            "    }\n",
            "    ... on User {\n",
            "      id\n",
            "      name\n",
            "      posts {\n",
            "        id\n",
            "        title\n",
            "      }\n",
            "    }\n",
            "  }\n",
            "}\n",
        ),
    );
}

#[test]
fn build_returns_none_for_leaf_types() {
    let schema = schema_from_sdl(SEARCH_SDL);
    let builder = SelectionSetBuilder::new(&schema, 5);
    let post = schema.resolve("Post").unwrap().as_object().unwrap();

    let title = post.fields().get("title").unwrap();
    assert_eq!(builder.build(title.type_annotation(), &HashSet::new(), 0), Ok(None));

    let author = post.fields().get("author").unwrap();
    let selection_set = builder.build(author.type_annotation(), &HashSet::new(), 0)
        .unwrap()
        .unwrap();
    let names = selection_set.selections()
        .iter()
        .filter_map(Selection::as_field)
        .map(|field| field.name())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["id", "name", "posts"]);
    assert!(!selection_set.is_typename_only());
}

#[test]
fn introspection_fields_are_never_selected() {
    let schema = schema_from_sdl("type Query { a: A } type A { b: Int }");
    let operations = OperationGenerator::new(&schema, &GeneratorConfig::default()).generate();
    let rendered = operations.queries()[0].to_graphql_string();
    assert!(!rendered.contains("__schema"));
    assert!(!rendered.contains("__type"));
}

#[test]
fn sibling_fragments_never_select_a_name_with_two_types() {
    let sdl = r#"
        type Query { pick: Pick metric: Metric }
        union Pick = IntBox | StringBox | OnlyValue
        type IntBox { value: Int size: Int }
        type StringBox { value: String size: Int label: String }
        type OnlyValue { value: [Int] }
        interface Metric { name: String }
        type Count implements Metric { name: String amount: Int }
        type Ratio implements Metric { name: String amount: Float }
    "#;
    assert_eq!(
        render_query(sdl, 5, "pick"),
        concat!(
            "query {\n",
            "  pick {\n",
            "    __typename\n",
            "    ... on IntBox {\n",
            "      value\n",
            "      size\n",
            "    }\n",
            "    ... on StringBox {\n",
            "      size\n",
            "      label\n",
            "    }\n",
            "  }\n",
            "}\n",
        ),
    );
    assert_eq!(
        render_query(sdl, 5, "metric"),
        concat!(
            "query {\n",
            "  metric {\n",
            "    name\n",
            "    ... on Count {\n",
            "      amount\n",
            "    }\n",
            "  }\n",
            "}\n",
        ),
    );
}
