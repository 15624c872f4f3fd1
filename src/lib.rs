pub mod core {
    pub mod command;
    pub mod domain;
    pub mod library;
    pub mod repository;
}

pub mod books {
    pub mod domain;
    pub mod repository;
}

pub mod catalog {
    pub mod command {
        pub mod get_book_cmd;
        pub mod list_books_cmd;
    }
    pub mod domain;
}

pub mod utils {
    pub mod logs;
}
