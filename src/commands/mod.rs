pub mod stdio_host;
