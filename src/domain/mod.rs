// Domain layer: plain value types shared by the validators, reports and CLI.

pub mod model;
