mod graphql_type_tests;
mod object_type_builder_tests;
mod type_annotation_tests;
