//! # 解析器模块
//!
//! 把表格中不规整的单元格文本解析成可比较的数值与标识。
//!
//! ## 依赖关系
//! - 被 `dataset/` 模块使用
//! - 无其他内部依赖
//! - 子模块: value, age, identity, collate

pub mod age;
pub mod collate;
pub mod identity;
pub mod value;

pub use age::parse_ages;
pub use collate::compare_names;
pub use identity::system_id;
pub use value::parse_cell;
