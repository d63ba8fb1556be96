//! 各路由页面的内容区渲染
//!
//! 每个页面只负责右侧内容区（边框和标题由 layout 画），
//! 登录页例外：它占据整个主内容区，没有导航栏。

pub mod billing;
pub mod dashboard;
pub mod dns_records;
pub mod domains;
pub mod login;
pub mod profile;
pub mod services;
pub mod support;
pub mod ticket_detail;
