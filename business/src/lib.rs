pub mod application {
    pub mod text {
        pub mod generate;
    }
}

pub mod domain {
    pub mod logger;
    pub mod text {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod generate;
        }
    }
}
