mod test_matrix;
