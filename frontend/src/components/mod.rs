pub mod data_table;
pub mod pagination;
pub mod product_wizard_modal;
pub mod sidebar;
pub mod table_toolbar;
