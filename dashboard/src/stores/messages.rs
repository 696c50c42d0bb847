//! Localized fallback messages shown when the backend gives no reason.

/// Fallbacks for the standard operations of one resource.
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    pub fetch_list: &'static str,
    pub fetch_one: &'static str,
    pub create: &'static str,
    pub update: &'static str,
    pub delete: &'static str,
}

pub const DOCUMENTS: Messages = Messages {
    fetch_list: "Không thể tải danh sách tài liệu",
    fetch_one: "Không thể tải thông tin tài liệu",
    create: "Không thể tạo tài liệu",
    update: "Không thể cập nhật tài liệu",
    delete: "Không thể xóa tài liệu",
};
pub const DOCUMENT_SHARE: &str = "Không thể chia sẻ tài liệu";
pub const DOCUMENT_UNSHARE: &str = "Không thể hủy chia sẻ tài liệu";

pub const CATEGORIES: Messages = Messages {
    fetch_list: "Không thể tải danh mục tài liệu",
    fetch_one: "Không thể tải thông tin danh mục",
    create: "Không thể tạo danh mục",
    update: "Không thể cập nhật danh mục",
    delete: "Không thể xóa danh mục",
};

pub const PROJECTS: Messages = Messages {
    fetch_list: "Không thể tải danh sách dự án",
    fetch_one: "Không thể tải thông tin dự án",
    create: "Không thể tạo dự án",
    update: "Không thể cập nhật dự án",
    delete: "Không thể xóa dự án",
};
pub const PROJECT_ADD_MEMBER: &str = "Không thể thêm thành viên vào dự án";
pub const PROJECT_REMOVE_MEMBER: &str = "Không thể xóa thành viên khỏi dự án";

pub const TASKS: Messages = Messages {
    fetch_list: "Không thể tải danh sách công việc",
    fetch_one: "Không thể tải thông tin công việc",
    create: "Không thể tạo công việc",
    update: "Không thể cập nhật công việc",
    delete: "Không thể xóa công việc",
};

pub const FORUM_POSTS: Messages = Messages {
    fetch_list: "Không thể tải danh sách bài viết",
    fetch_one: "Không thể tải bài viết",
    create: "Không thể tạo bài viết",
    update: "Không thể cập nhật bài viết",
    delete: "Không thể xóa bài viết",
};

pub const COMMENTS: Messages = Messages {
    fetch_list: "Không thể tải bình luận",
    fetch_one: "Không thể tải bình luận",
    create: "Không thể gửi bình luận",
    update: "Không thể cập nhật bình luận",
    delete: "Không thể xóa bình luận",
};

// Accounts are created through registration, so users have no create message
pub const USERS_FETCH_LIST: &str = "Không thể tải danh sách người dùng";
pub const USERS_FETCH_ONE: &str = "Không thể tải thông tin người dùng";
pub const USERS_UPDATE: &str = "Không thể cập nhật người dùng";
pub const USERS_DELETE: &str = "Không thể xóa người dùng";

pub const UPLOAD: &str = "Không thể tải tệp lên";
pub const UPLOAD_DELETE: &str = "Không thể xóa tệp";
