mod input_object_type_validator_tests;
