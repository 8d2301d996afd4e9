mod compose_tests;
mod subscription_tests;
