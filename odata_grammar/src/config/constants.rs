pub mod compile_time {
    pub mod lexical {
        /// Hard cap on a single identifier, in bytes: one leading
        /// character plus at most 127 continuation characters. The
        /// identifier matcher never consumes past this bound,
        /// whatever the input length.
        pub const MAX_IDENTIFIER_LENGTH: usize = 128;
    }

    pub mod grammar {
        /// Wrapper literal for collection-valued qualified type names.
        pub const COLLECTION_LITERAL: &str = "Collection";

        /// Prefix shared by every built-in primitive type name.
        pub const EDM_PREFIX: &str = "Edm.";
    }
}
