// Create the Error, ErrorKind, ResultExt, and Result types
error_chain! {
    foreign_links {
        Io(::std::io::Error);
        Yaml(::serde_yaml::Error);
        Json(::serde_json::Error);
    }

    errors {
        UnknownVariable(var: String) {
            description("variable not found in factor")
            display("variable not found in factor: '{}'", var)
        }

        DegenerateNormalization {
            description("cannot normalize a factor whose weights sum to zero")
            display("cannot normalize a factor whose weights sum to zero (contradictory evidence or malformed network)")
        }

        InvalidFactor(reason: String) {
            description("invalid factor")
            display("invalid factor: {}", reason)
        }

        InvalidNetwork(reason: String) {
            description("invalid network")
            display("invalid network: {}", reason)
        }

        ScopeTooLarge(size: usize, limit: usize) {
            description("intermediate factor is too large")
            display("intermediate factor has {} variables, but the limit is {}", size, limit)
        }
    }
}

impl Error {
    /// Evidence restriction skips factors that fail this way
    pub fn is_unknown_variable(&self) -> bool {
        match *self.kind() {
            ErrorKind::UnknownVariable(_) => true,
            _ => false
        }
    }
}
