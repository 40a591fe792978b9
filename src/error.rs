use custom_error::custom_error;

pub type Result<T> = std::result::Result<T, Error>;

custom_error! {pub Error
    UnknownOrigin{code: String} = "Unknown origin airport: {code}",
    UnknownDestination{code: String} = "Unknown destination airport: {code}",
    SameAirport = "Origin and destination cannot be the same.",
    Io{source: std::io::Error} = "I/O error",
    Config{message: String} = "Invalid tuning file: {message}"
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Error {
        Error::Config {
            message: e.to_string(),
        }
    }
}
