pub mod execute_msg;
pub mod helpers;
pub mod test_msgs;
