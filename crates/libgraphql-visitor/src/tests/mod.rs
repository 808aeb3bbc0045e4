mod type_context_tests;
mod walker_tests;

use libgraphql_ast::Document;
use libgraphql_ast::merge_base_schema;
use libgraphql_ast::parse_definition;

pub(super) const DOG_SCHEMA: &str = r#"
    schema { query: Query mutation: Mutation }

    type Query {
        dog: Dog
        pets: [Pet]
    }

    type Mutation {
        renameDog(name: String!): Dog
    }

    interface Pet {
        name: String
    }

    type Dog implements Pet {
        name: String
        barkVolume(loud: Boolean): Int
        owner: Human
    }

    type Cat implements Pet {
        name: String
    }

    type Human {
        name: String
    }
"#;

pub(super) fn dog_schema() -> Document {
    let mut schema = parse_definition(DOG_SCHEMA).unwrap();
    merge_base_schema(&mut schema);
    schema
}
