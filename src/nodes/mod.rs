pub mod hidden_node;
pub mod input_node;
pub mod output_node;
