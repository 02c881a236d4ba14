mod tests_node_model;
