//! 副作用描述
//!
//! Update 层从不等待 I/O：需要访问后端时把 `Command` 压入 `App::pending`，
//! 主循环再交给 Dispatcher 执行。需要认证的命令显式携带守卫签发的 `Session`。

use mailguard_core::services::{DeleteTicket, FetchTicket, Mutation};
use mailguard_core::types::{ResourceRow, Session};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Fetch {
        session: Session,
        ticket: FetchTicket,
    },
    Delete {
        session: Session,
        ticket: DeleteTicket,
    },
    Mutate {
        session: Session,
        mutation: Mutation,
    },
    /// 把一条有效邮箱加入黑名单
    Blacklist {
        session: Session,
        row: ResourceRow,
    },
    /// 导出当前表格中的有效邮箱
    Export(Vec<ResourceRow>),
    Validate(String),
    Login {
        email: String,
        password: String,
    },
    RestoreSession,
    Logout,
}
