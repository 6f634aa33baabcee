pub mod use_table_data;
