mod enums;
mod support;
