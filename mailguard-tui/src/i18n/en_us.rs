//! 英文翻译 (en-US)

use super::keys::{
    CommonTexts, HelpTexts, HintTexts, LoginTexts, ModalTexts, NavTexts, TableTexts, TopBarTexts,
    Translations, ValidatorTexts,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "MailGuard Admin",
        cancel: "Cancel",
        delete: "Delete",
        close: "Close",
        yes: "Yes",
        no: "No",
    },

    hints: HintTexts {
        switch_panel: "Switch Panels",
        select: "Select",
        open: "Open",
        page: "Page",
        search: "Search",
        add: "Add",
        edit: "Edit",
        delete: "Delete",
        blacklist: "Blacklist",
        export: "Export CSV",
        refresh: "Refresh",
        help: "Help",
        logout: "Logout",
        quit: "Quit",
        submit: "Submit",
        cancel: "Cancel",
        newline: "New Line",
        next_field: "Next Field",
        validate: "Validate",
    },

    nav: NavTexts {
        title: "Admin Dashboard",
        valid_emails: "Valid Emails",
        blacklisted_domains: "Blacklisted Domains",
        blacklisted_emails: "Blacklisted Emails",
        validator: "Validate Email",
    },

    top_bar: TopBarTexts {
        welcome: "Welcome, {email}",
        logout_hint: "Alt+l Logout",
        guest: "Not signed in",
        login_hint: "Open any dashboard view to sign in",
    },

    table: TableTexts {
        col_domain: "Domain",
        col_email: "Email",
        col_created: "Created At",
        col_validated: "Validation Date",
        col_reason: "Reason",
        col_status: "Status",
        search_placeholder: "Search {plural}...",
        loading: "Loading...",
        empty: "No {plural} found",
        showing: "Showing {start} to {end} of {total} results",
        previous: "Previous",
        next: "Next",
        retry_hint: "Press Alt+r to retry",
    },

    validator: ValidatorTexts {
        title: "Email Validator",
        subtitle: "Check whether an address is safe to send to",
        email_label: "Email Address",
        placeholder: "name@example.com",
        button: "Validate Email",
        validating: "Validating...",
        failed: "Failed to validate email",
        did_you_mean: "Did you mean: {suggestion}?",
        domain: "Domain",
        user: "User",
        free: "Free Provider",
        role: "Role Address",
        disposable: "Disposable",
        accept_all: "Accept All",
        safe_to_send: "Safe to Send",
    },

    login: LoginTexts {
        title: "Admin Login",
        email: "Email",
        password: "Password",
        submit: "Sign In",
        signing_in: "Signing in...",
        admin_only: "Administrator access required",
        failed: "Login failed",
        logged_out: "Logged out",
    },

    modal: ModalTexts {
        confirm_delete_title: "Confirm Delete",
        confirm_delete_message: "Delete \"{value}\"?",
        confirm_delete_warning: "This action cannot be undone.",
        help_title: "Keyboard Shortcuts",
    },

    help: HelpTexts {
        global: "Global",
        table: "Tables",
        modal: "Forms",
        quit: "Quit",
        switch_panel: "Switch sidebar / content",
        refresh: "Refresh current table",
        help: "Show this help",
        logout: "Log out",
        select_row: "Select row",
        change_page: "Previous / next page",
        first_last_page: "First / last page",
        search: "Edit search, Enter to submit",
        add: "Add entries",
        edit: "Edit selected entry",
        delete: "Delete selected entry",
        blacklist: "Blacklist selected valid email",
        export: "Export valid emails to CSV",
        submit: "Submit",
        newline: "New line (bulk add)",
        cancel: "Cancel",
    },
};
