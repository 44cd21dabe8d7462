mod variables_binding_tests;
