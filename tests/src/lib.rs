//! This module contains end to end tests of the semantic type core
