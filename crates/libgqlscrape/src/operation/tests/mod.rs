mod generated_document_tests;
mod selection_set_builder_tests;
