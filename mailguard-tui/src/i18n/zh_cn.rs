//! 简体中文翻译 (zh-CN)

use super::keys::{
    CommonTexts, HelpTexts, HintTexts, LoginTexts, ModalTexts, NavTexts, TableTexts, TopBarTexts,
    Translations, ValidatorTexts,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "MailGuard 管理后台",
        cancel: "取消",
        delete: "删除",
        close: "关闭",
        yes: "是",
        no: "否",
    },

    hints: HintTexts {
        switch_panel: "切换面板",
        select: "选择",
        open: "打开",
        page: "翻页",
        search: "搜索",
        add: "添加",
        edit: "编辑",
        delete: "删除",
        blacklist: "拉黑",
        export: "导出 CSV",
        refresh: "刷新",
        help: "帮助",
        logout: "登出",
        quit: "退出",
        submit: "提交",
        cancel: "取消",
        newline: "换行",
        next_field: "下一项",
        validate: "校验",
    },

    nav: NavTexts {
        title: "管理面板",
        valid_emails: "有效邮箱",
        blacklisted_domains: "域名黑名单",
        blacklisted_emails: "邮箱黑名单",
        validator: "邮箱校验",
    },

    top_bar: TopBarTexts {
        welcome: "欢迎，{email}",
        logout_hint: "Alt+l 登出",
        guest: "未登录",
        login_hint: "打开任一管理视图以登录",
    },

    table: TableTexts {
        col_domain: "域名",
        col_email: "邮箱",
        col_created: "创建时间",
        col_validated: "校验日期",
        col_reason: "原因",
        col_status: "状态",
        search_placeholder: "搜索{plural}...",
        loading: "加载中...",
        empty: "没有找到 {plural}",
        showing: "第 {start} 至 {end} 条，共 {total} 条",
        previous: "上一页",
        next: "下一页",
        retry_hint: "按 Alt+r 重试",
    },

    validator: ValidatorTexts {
        title: "邮箱校验",
        subtitle: "检查一个地址是否可以安全发送",
        email_label: "邮箱地址",
        placeholder: "name@example.com",
        button: "校验邮箱",
        validating: "校验中...",
        failed: "邮箱校验失败",
        did_you_mean: "您是否想输入：{suggestion}？",
        domain: "域名",
        user: "用户名",
        free: "免费邮箱",
        role: "角色地址",
        disposable: "一次性邮箱",
        accept_all: "全部接收",
        safe_to_send: "可安全发送",
    },

    login: LoginTexts {
        title: "管理员登录",
        email: "邮箱",
        password: "密码",
        submit: "登录",
        signing_in: "登录中...",
        admin_only: "需要管理员权限",
        failed: "登录失败",
        logged_out: "已登出",
    },

    modal: ModalTexts {
        confirm_delete_title: "确认删除",
        confirm_delete_message: "删除 \"{value}\"？",
        confirm_delete_warning: "此操作无法撤销。",
        help_title: "快捷键",
    },

    help: HelpTexts {
        global: "全局",
        table: "列表",
        modal: "表单",
        quit: "退出",
        switch_panel: "切换侧栏 / 内容",
        refresh: "刷新当前列表",
        help: "显示帮助",
        logout: "登出",
        select_row: "选择行",
        change_page: "上一页 / 下一页",
        first_last_page: "首页 / 末页",
        search: "编辑搜索，Enter 提交",
        add: "添加条目",
        edit: "编辑所选条目",
        delete: "删除所选条目",
        blacklist: "拉黑所选有效邮箱",
        export: "导出有效邮箱为 CSV",
        submit: "提交",
        newline: "换行（批量添加）",
        cancel: "取消",
    },
};
