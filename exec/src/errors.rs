// Create the Error, ErrorKind, ResultExt, and Result types
error_chain! {
    links {
        Bnet(::bnet::errors::Error, ::bnet::errors::ErrorKind);
    }

    foreign_links {
        Io(::std::io::Error);
        Yaml(::serde_yaml::Error);
    }
}
