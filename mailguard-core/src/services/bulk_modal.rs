//! 批量添加 / 编辑表单
//!
//! 受控表单：只保存一段文本，提交时原样交给 Dashboard，不做任何 I/O。

use crate::types::{capitalize, ResourceKind, ResourceRow};

/// 表单模式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMode {
    /// 多行，逗号分隔
    BulkAdd { kind: ResourceKind },
    /// 单行，原样提交
    Edit { kind: ResourceKind, id: String },
}

/// 批量添加 / 编辑表单状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkModal {
    mode: ModalMode,
    text: String,
}

impl BulkModal {
    pub fn bulk_add(kind: ResourceKind) -> Self {
        Self {
            mode: ModalMode::BulkAdd { kind },
            text: String::new(),
        }
    }

    /// 编辑模式，以当前值预填
    pub fn edit(kind: ResourceKind, row: &ResourceRow) -> Self {
        Self {
            mode: ModalMode::Edit {
                kind,
                id: row.id.clone(),
            },
            text: row.value.clone(),
        }
    }

    /// 表单打开期间编辑目标变化时重新同步
    pub fn sync_edit_data(&mut self, row: &ResourceRow) {
        if let ModalMode::Edit { id, .. } = &mut self.mode {
            id.clone_from(&row.id);
            self.text.clone_from(&row.value);
        }
    }

    pub fn mode(&self) -> &ModalMode {
        &self.mode
    }

    pub fn kind(&self) -> ResourceKind {
        match &self.mode {
            ModalMode::BulkAdd { kind } | ModalMode::Edit { kind, .. } => *kind,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, ModalMode::Edit { .. })
    }

    pub fn is_multiline(&self) -> bool {
        !self.is_edit()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    // ========== 输入 ==========

    pub fn insert_char(&mut self, c: char) {
        if c == '\n' {
            self.insert_newline();
        } else {
            self.text.push(c);
        }
    }

    /// 仅批量添加模式接受换行
    pub fn insert_newline(&mut self) {
        if self.is_multiline() {
            self.text.push('\n');
        }
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// 取走文本（提交时使用）
    pub fn into_text(self) -> String {
        self.text
    }

    // ========== 文案 ==========

    /// "Add Domains" / "Edit Domain"
    pub fn title(&self) -> String {
        match &self.mode {
            ModalMode::BulkAdd { kind } => format!("Add {}", capitalize(kind.plural())),
            ModalMode::Edit { kind, .. } => format!("Edit {}", capitalize(kind.singular())),
        }
    }

    /// "Enter domains (comma-separated)" / "Enter domain"
    pub fn placeholder(&self) -> String {
        match &self.mode {
            ModalMode::BulkAdd { kind } => format!("Enter {} (comma-separated)", kind.plural()),
            ModalMode::Edit { kind, .. } => format!("Enter {}", kind.singular()),
        }
    }

    /// "Add" / "Update"
    pub fn confirm_label(&self) -> &'static str {
        if self.is_edit() {
            "Update"
        } else {
            "Add"
        }
    }
}

/// 拆分批量输入：逗号或换行分隔，去除首尾空白，丢弃空项
pub fn split_bulk_input(raw: &str) -> Vec<String> {
    raw.split([',', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
