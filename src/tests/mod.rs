// Test modules for smooth-result crate
//
// Test organization follows the template pattern where each source file
// has a corresponding test file that focuses on business logic verification.
